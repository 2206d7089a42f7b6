#[cfg(test)]
mod common;

#[cfg(test)]
mod property_list_tests;

#[cfg(test)]
mod property_mutation_tests;

#[cfg(test)]
mod session_tests;
