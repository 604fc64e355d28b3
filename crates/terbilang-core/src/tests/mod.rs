mod proptest_props;
