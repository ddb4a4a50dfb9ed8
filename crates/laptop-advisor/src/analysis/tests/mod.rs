mod aggregate;
mod common;
mod extraction;
