mod profile_use_case_tests;
