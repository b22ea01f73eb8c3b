pub mod scholarship_discovery;
