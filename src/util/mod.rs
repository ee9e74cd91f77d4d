pub mod advice;
pub mod html;
