/// Configuration constants for the KSC Open API
pub mod api {
    /// Path of the Open API relative to `{server}:{port}`
    pub const API_PATH: &str = "/api/v1.0";

    /// Default KSC Open API port
    pub const DEFAULT_PORT: u16 = 13299;

    /// Session login endpoint
    pub const LOGIN: &str = "login";

    /// Group search endpoint
    pub const FIND_GROUPS: &str = "HostGroup.FindGroups";

    /// Host search endpoint
    pub const FIND_HOSTS: &str = "HostGroup.FindHosts";

    /// Accessor item count endpoint
    pub const GET_ITEMS_COUNT: &str = "ChunkAccessor.GetItemsCount";

    /// Accessor chunk endpoint
    pub const GET_ITEMS_CHUNK: &str = "ChunkAccessor.GetItemsChunk";

    /// Accessor lifetime requested from the server (passed verbatim)
    pub const MAX_LIFETIME: u32 = 100;

    /// Offset step of the chunk loop
    pub const CHUNK_STEP: i64 = 100_000;

    /// Fields requested for group records
    pub const GROUP_FIELDS: &[&str] = &["id", "name"];

    /// Fields requested for host records
    pub const HOST_FIELDS: &[&str] = &["KLHST_WKS_FQDN", "KLHST_WKS_HOSTNAME"];

    /// Host attribute holding the owning group id
    pub const HOST_GROUP_ATTR: &str = "KLHST_WKS_GROUPID";
}

/// Environment variables read by the CLI
pub mod env {
    pub const SERVER: &str = "KSC_SERVER";
    pub const PORT: &str = "KSC_PORT";
    pub const URL: &str = "KSC_URL";
    pub const USER: &str = "KSC_USER";
    pub const PASSWORD: &str = "KSC_PASSWORD";
    pub const INSECURE: &str = "KSC_INSECURE";
}

/// Default values for CLI
pub mod defaults {
    /// Default log level
    pub const LOG_LEVEL: &str = "warn";
}
