pub mod branch;
pub mod branch_record;
pub mod track_state;
