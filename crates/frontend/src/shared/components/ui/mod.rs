pub mod badge;

pub use badge::{ActiveFlag, Badge, BadgeStatus, StatusBadge};
