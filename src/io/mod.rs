/// CSV export of the monitor's tabular views.
pub mod export;
