pub(crate) mod budget;
