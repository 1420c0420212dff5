use super::{footer, page_header, text};
use crate::content::narrative::CONCLUSION;

pub fn show_conclusion(ui: &mut egui::Ui) {
    page_header(ui, "Conclusions");
    text(ui, CONCLUSION);
    footer(ui, "Conclusions");
}
