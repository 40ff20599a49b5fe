pub mod attendance;
pub mod qr;
