pub mod collation_ext;
