/// Connection bootstrap against SQLite
pub mod db_tests;
