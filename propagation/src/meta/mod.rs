pub mod object_meta_ext;
