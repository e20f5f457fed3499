use script_table::{ EngineRegistry, ScriptConfig, ScriptTable, Table, Value };

use crate::fixtures::CalcEngine ;

#[test]
fn dispatch_compounding_prefixes() {

	// The first pipeline evaluates to a string that starts with the second
	// configured prefix; the second pipeline then runs against that result
	// within the same read.
	let fixture = table!( "location", [ "num" ], row: [ "str:'calc:12/2'" ] );
	let mut host = EngineRegistry::new();
	host.register( CalcEngine::new( "calc" ));

	let configs = [
		ScriptConfig::new( "calc", "str:" ).expect( "Failed to build configuration" ),
		ScriptConfig::new( "calc", "calc:" ).expect( "Failed to build configuration" ),
	];
	let table = ScriptTable::new( fixture, &configs, &host ).expect( "Failed to wrap table" );

	assert_eq!( table.value( 0, "num" ).expect( "Failed to read cell" ), Value::from( 6 ));

}
