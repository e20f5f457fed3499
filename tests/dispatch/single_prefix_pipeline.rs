use script_table::{ EngineRegistry, ScriptConfig, ScriptTable, Table, Value };

use crate::fixtures::{ CalcEngine, RequireAddingHandler };

#[test]
fn dispatch_single_prefix_pipeline() {

	let fixture = table!( "location", [ "num" ], row: [ "calc:12/2" ] );
	let mut host = EngineRegistry::new();
	host.register( CalcEngine::new( "calc" ));

	let config = ScriptConfig::new( "calc", "calc:" )
		.expect( "Failed to build configuration" )
		.with_handler(|| RequireAddingHandler::new( "calc" ));
	let table = ScriptTable::new( fixture, [ &config ], &host )
		.expect( "Failed to wrap table" );

	assert_eq!( table.value( 0, "num" ).expect( "Failed to read cell" ), Value::from( 6 ));

}
