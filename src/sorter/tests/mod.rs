mod aggregator_test;
