#[cfg(test)]
mod common;

#[cfg(test)]
mod auth_client_tests;

#[cfg(test)]
mod section_load_tests;

#[cfg(test)]
mod admin_users_tests;
