pub mod bar;
pub mod currency;
pub mod range;
pub mod request_params;
