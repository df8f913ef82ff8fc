mod login;
mod restore;
