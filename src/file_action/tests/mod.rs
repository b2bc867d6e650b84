mod fs_test;
