pub mod nexus_card;
pub mod product_card;
