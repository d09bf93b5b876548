pub const SPO_CONNECT: &str = "spo connect";
pub const SPO_DISCONNECT: &str = "spo disconnect";
pub const SPO_STATUS: &str = "spo status";
pub const APP_ADD: &str = "spo app add";
pub const PROJECT_UPGRADE: &str = "spfx project upgrade";

pub const NOT_CONNECTED_MESSAGE: &str = "Connect to a SharePoint Online site first";

/// Environment variable that takes precedence over the token stored by `spo connect`.
pub const ACCESS_TOKEN_ENV: &str = "O365_ACCESS_TOKEN";

pub const CONFIG_SCHEMA_URL: &str =
    "https://developer.microsoft.com/json-schemas/spfx-build/config.2.0.schema.json";
pub const CONFIG_VERSION: &str = "2.0";
pub const CONFIG_JSON_FILE: &str = "./config/config.json";
