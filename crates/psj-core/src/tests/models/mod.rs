mod identity;
mod registration;
mod role;
