use script_table::{ EngineRegistry, ReadError, ScriptConfig, ScriptTable, Table };

use crate::fixtures::{ CalcEngine, FixtureError };

#[test]
fn read_error_source_error_passthrough() {

	let fixture = table!( "location", [ "num" ], row: [ 1 ] );
	let mut host = EngineRegistry::new();
	host.register( CalcEngine::new( "calc" ));

	let config = ScriptConfig::new( "calc", "calc:" ).expect( "Failed to build configuration" );
	let table = ScriptTable::new( fixture, [ &config ], &host ).expect( "Failed to wrap table" );

	match table.value( 0, "missing" ) {
		Err( ReadError::Source( FixtureError::NoSuchColumn( column ))) => assert_eq!( column, "missing" ),
		value => panic!( "Expected Source error, found: {:?}", value ),
	}

}
