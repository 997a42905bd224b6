mod account_validator;
mod models;
