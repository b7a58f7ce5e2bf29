mod snapshot;

pub(crate) use snapshot::save_json;
