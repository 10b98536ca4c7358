pub mod animator;
pub mod damage;
pub mod flash;
pub mod label;
pub mod particles;
pub mod shake;
pub mod status;
pub mod surface;
pub mod tempo;
pub mod token;
