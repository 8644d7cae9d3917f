mod dictionary_tests;
