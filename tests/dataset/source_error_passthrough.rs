use script_table::{ DataSet, DataSetError, EngineRegistry, ScriptConfig, ScriptDataSet };

use crate::fixtures::{ CalcEngine, FixtureError, MemTable };

struct BrokenDataSet ;

impl DataSet for BrokenDataSet {
	type Error = FixtureError ;
	type Table<'a> = &'a MemTable where Self: 'a ;
	type Iter<'a> = std::vec::IntoIter<Result<&'a MemTable, FixtureError>> where Self: 'a ;
	type ReverseIter<'a> = std::vec::IntoIter<Result<&'a MemTable, FixtureError>> where Self: 'a ;

	fn iter( &self ) -> Self::Iter<'_> {
		vec![ Err( FixtureError::Broken( "io failure".to_string() ))].into_iter()
	}

	fn reverse_iter( &self ) -> Self::ReverseIter<'_> {
		self.iter()
	}
}

#[test]
fn dataset_source_error_passthrough() {

	let mut host = EngineRegistry::new();
	host.register( CalcEngine::new( "calc" ));

	let dataset = ScriptDataSet::new(
		BrokenDataSet,
		host,
		[ ScriptConfig::new( "calc", "calc:" ).expect( "Failed to build configuration" )],
	).expect( "Failed to wrap dataset" );

	match dataset.iter().next() {
		Some( Err( DataSetError::Source( FixtureError::Broken( message )))) => {
			assert_eq!( message, "io failure" );
		}
		value => panic!( "Expected Source error, found: {:?}", value ),
	}

}
