pub mod concept_card;
pub mod ui;
