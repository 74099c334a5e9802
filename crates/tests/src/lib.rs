#[cfg(test)]
mod common;

#[cfg(test)]
mod policy_tests;

#[cfg(test)]
mod registry_tests;

#[cfg(test)]
mod session_tests;

#[cfg(test)]
mod composer_tests;

#[cfg(test)]
mod signin_tests;

#[cfg(test)]
mod directory_tests;
