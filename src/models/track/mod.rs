pub mod track_entry;
