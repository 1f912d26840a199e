pub mod diagnosis_panel;
pub mod header;
pub mod image_preview;
pub mod upload_form;
