pub const BLUE_USER: &str = "dave@gmail.com";
pub const BLUE_NAMESPACE: &str = "app1";
pub const RED_NAMESPACE: &str = "app4";
pub const SYSTEM_NAMESPACE: &str = "kube-system";

pub const CORE_GROUP: &str = "";
pub const CLUSTER_SCOPE: &str = "";

pub const CREATE: &str = "create";
pub const GET: &str = "get";
pub const LABEL: &str = "label";
