mod admin;
mod storage;
