pub mod lien;
