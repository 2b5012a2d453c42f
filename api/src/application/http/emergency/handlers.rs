pub mod get_emergency_contacts;
