mod test_disconnect_broadcasts_removal;
mod test_duplicate_admit_is_idempotent;
