use super::{bullets, footer, page_header, section_header};
use crate::content::narrative::{MODELING_TOOLS, REFERENCES, TOOLS};

pub fn show_references(ui: &mut egui::Ui) {
    page_header(ui, "References");

    for (citation, url) in REFERENCES {
        ui.label(citation);
        ui.hyperlink(url);
        ui.add_space(6.0);
    }
    ui.separator();

    section_header(ui, "Tools & Libraries");
    ui.columns(2, |cols| {
        cols[0].label(egui::RichText::new("Dashboard").strong());
        bullets(&mut cols[0], &TOOLS);
        cols[1].label(egui::RichText::new("Modeling").strong());
        bullets(&mut cols[1], &MODELING_TOOLS);
    });

    footer(ui, "References");
}
