mod dataset_store;
mod report;
