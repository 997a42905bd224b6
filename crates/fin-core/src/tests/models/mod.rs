mod account;
mod user_ref;
