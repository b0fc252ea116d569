pub mod cli;
pub mod count;
pub mod fetch;
pub mod parser;
pub mod report;
pub mod status;

pub mod gtfs_rt {
    include!(concat!(env!("OUT_DIR"), "/transit_realtime.rs"));
}
