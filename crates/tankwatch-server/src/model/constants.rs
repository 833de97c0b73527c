//! Property names and defaults for server configuration

pub const SERVER_ADDRESS_PROPERTY: &str = "server.address";
pub const SERVER_PORT_PROPERTY: &str = "server.port";

pub const DATABASE_URL_PROPERTY: &str = "db.url";

pub const TELEMETRY_TABLE_PROPERTY: &str = "tankwatch.telemetry.table";
pub const AIR_PRESSURE_FIELD_PROPERTY: &str = "tankwatch.telemetry.airPressureField";
pub const PROVISION_DEFAULT_TANKS_PROPERTY: &str = "tankwatch.provision.defaultTanks";

pub const DEFAULT_SERVER_ADDRESS: &str = "0.0.0.0";
pub const DEFAULT_SERVER_PORT: u16 = 5000;
pub const DEFAULT_TELEMETRY_TABLE: &str = "tank_data";
pub const DEFAULT_AIR_PRESSURE_FIELD: &str = "DATA12";
