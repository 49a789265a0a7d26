use crate::constants::{
    BLUE_NAMESPACE, BLUE_USER, CLUSTER_SCOPE, CORE_GROUP, CREATE, GET, LABEL, RED_NAMESPACE,
    SYSTEM_NAMESPACE,
};
use crate::types::AccessCheckCase;

pub const CREATE_DEPLOYMENT: AccessCheckCase = AccessCheckCase {
    name: "Developer can create deployment",
    user: BLUE_USER,
    namespace: BLUE_NAMESPACE,
    verb: CREATE,
    group: "apps",
    resource: "deployments",
    expected_allowed: true,
};

pub const CREATE_ROLE_BINDING: AccessCheckCase = AccessCheckCase {
    name: "Developer can't create role binding",
    user: BLUE_USER,
    namespace: BLUE_NAMESPACE,
    verb: CREATE,
    group: "rbac.authorization.k8s.io",
    resource: "rolebindings",
    expected_allowed: false,
};

pub const LABEL_NAMESPACES: AccessCheckCase = AccessCheckCase {
    name: "Developers can't change namespace labels",
    user: BLUE_USER,
    namespace: CLUSTER_SCOPE,
    verb: LABEL,
    group: CORE_GROUP,
    resource: "namespaces",
    expected_allowed: false,
};

pub const GET_PODS_OTHER_TEAM: AccessCheckCase = AccessCheckCase {
    name: "User from team blue can't list pods in team red namespace",
    user: BLUE_USER,
    namespace: RED_NAMESPACE,
    verb: GET,
    group: CORE_GROUP,
    resource: "pods",
    expected_allowed: false,
};

pub const GET_PODS_KUBE_SYSTEM: AccessCheckCase = AccessCheckCase {
    name: "Developer can't list pods in kube-system namespace",
    user: BLUE_USER,
    namespace: SYSTEM_NAMESPACE,
    verb: GET,
    group: CORE_GROUP,
    resource: "pods",
    expected_allowed: false,
};

// The redis operator CRDs carry the aggregate-to-edit label.
pub const CREATE_AGGREGATED_CRD: AccessCheckCase = AccessCheckCase {
    name: "Developer can create CRDs aggregated with \"edit\" cluster role",
    user: BLUE_USER,
    namespace: BLUE_NAMESPACE,
    verb: CREATE,
    group: "redis.redis.opstreelabs.in",
    resource: "redis",
    expected_allowed: true,
};

pub const DEVELOPER_SUITE: [AccessCheckCase; 6] = [
    CREATE_DEPLOYMENT,
    CREATE_ROLE_BINDING,
    LABEL_NAMESPACES,
    GET_PODS_OTHER_TEAM,
    GET_PODS_KUBE_SYSTEM,
    CREATE_AGGREGATED_CRD,
];
