mod identifier_test;
mod polygon_test;
