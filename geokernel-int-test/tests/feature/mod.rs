mod delegate_test;
mod feature_collection_test;
