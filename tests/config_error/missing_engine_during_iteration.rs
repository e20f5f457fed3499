use script_table::{ ConfigError, DataSet, DataSetError, EngineRegistry, ScriptConfig, ScriptDataSet };

use crate::fixtures::MemDataSet ;

#[test]
fn config_error_missing_engine_during_iteration() {

	let wrapped = MemDataSet::new( vec![ table!( "location", [ "num" ], row: [ 1 ] )]);
	let host = EngineRegistry::new();

	let dataset = ScriptDataSet::new(
		wrapped,
		host,
		[ ScriptConfig::new( "unknown", "unknown:" ).expect( "Failed to build configuration" )],
	).expect( "Failed to wrap dataset" );

	match dataset.iter().next() {
		Some( Err( DataSetError::Config( ConfigError::NoEngine { language }))) => {
			assert_eq!( language, "unknown" );
		}
		value => panic!( "Expected NoEngine error, found: {:?}", value ),
	}

}
