//! SeaORM entity definitions

pub mod tank_config;

pub mod prelude {
    pub use super::tank_config::Entity as TankConfig;
}
