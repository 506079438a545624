pub mod a001_recharge;
pub mod a002_cancellation;
pub mod a003_platform;
pub mod a004_cash_desk;
pub mod a005_user;
pub mod a006_permission;
pub mod a007_commission;
pub mod a008_commission_config;
pub mod a009_transaction;
