pub mod cta;
pub mod features;
pub mod footer;
pub mod hero;
pub mod icons;
pub mod signup_form;
