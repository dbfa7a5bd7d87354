pub mod walkdir;
