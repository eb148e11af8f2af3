pub mod insert_script;
