use script_table::{ EngineRegistry, ScriptConfig, ScriptTable, Table, Value };

use crate::fixtures::{ CalcEngine, ReversingHandler };

#[test]
fn dispatch_post_invoke_reshapes_result() {

	let fixture = table!( "location", [ "addr" ], row: [ "calc:'Webster Street'" ] );
	let mut host = EngineRegistry::new();
	host.register( CalcEngine::new( "calc" ));

	let config = ScriptConfig::new( "calc", "calc:" )
		.expect( "Failed to build configuration" )
		.with_handler(|| ReversingHandler::new( "calc" ));
	let table = ScriptTable::new( fixture, [ &config ], &host ).expect( "Failed to wrap table" );

	assert_eq!( table.value( 0, "addr" ).expect( "Failed to read cell" ), Value::from( "teertS retsbeW" ));

}
