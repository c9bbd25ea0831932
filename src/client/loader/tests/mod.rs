mod load_state;
