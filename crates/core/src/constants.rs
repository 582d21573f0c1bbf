/// Constants describing the on-disk app directory layout
// Section directories
pub const DIR_AUTH: &str = "auth";
pub const DIR_FUNCTIONS: &str = "functions";
pub const DIR_DATA_SOURCES: &str = "data_sources";
pub const DIR_HTTP_ENDPOINTS: &str = "http_endpoints";
pub const DIR_SERVICES: &str = "services";
pub const DIR_GRAPHQL: &str = "graphql";
pub const DIR_SYNC: &str = "sync";
pub const DIR_SECRETS: &str = "secrets";
pub const DIR_ENVIRONMENTS: &str = "environments";
pub const DIR_HOSTING: &str = "hosting";
pub const DIR_TRIGGERS: &str = "triggers";
pub const DIR_VALUES: &str = "values";

// Nested directories
pub const DIR_INCOMING_WEBHOOKS: &str = "incoming_webhooks";
pub const DIR_RULES: &str = "rules";
pub const DIR_CUSTOM_RESOLVERS: &str = "custom_resolvers";

// Files
pub const FILE_CONFIG: &str = "config.json";
pub const FILE_PROVIDERS: &str = "providers.json";
pub const FILE_CUSTOM_USER_DATA: &str = "custom_user_data.json";
pub const FILE_RULES: &str = "rules.json";
pub const FILE_SCHEMA: &str = "schema.json";
pub const FILE_SOURCE: &str = "source.js";
pub const FILE_APP_SERVICES_SECRETS: &str = "app_services.json";
pub const FILE_SERVICES_SECRETS: &str = "services.json";
pub const FILE_HOSTING_METADATA: &str = "metadata.json";

// Extensions
pub const EXT_JSON: &str = "json";
pub const DEFAULT_SOURCE_EXTENSION: &str = "js";

// Keys the converter injects into documents on load and strips on write
pub const KEY_SCHEMA: &str = "schema";
pub const KEY_SOURCE: &str = "source";

// Keys that name entities on disk
pub const KEY_NAME: &str = "name";
pub const KEY_DATABASE: &str = "database";
pub const KEY_COLLECTION: &str = "collection";
pub const KEY_ON_TYPE: &str = "on_type";
pub const KEY_FIELD_NAME: &str = "field_name";
pub const KEY_CONFIG_VERSION: &str = "config_version";

// Environment variable controlling log output
pub const APPDIR_LOG_VAR: &str = "APPDIR_LOG";
