mod test_contacts;
mod test_lists;
mod test_people;
