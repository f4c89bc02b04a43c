mod helpers;
mod items;
mod login;
mod register;
mod user;
