/// Spacing in Å² (the unit of `NNs`) between consecutive [`SIX_CORR`] entries.
pub const SIX_CORR_SPACING: f64 = 0.01;

/// Ratio of the flat six-dimensional ball volume `π/48 · NNs³` to the volume of the ball
/// of squared radius `NNs` in R³ × SO(3) under the combined position + rotation-angle
/// metric, tabulated at `NNs = i · SIX_CORR_SPACING`.
#[rustfmt::skip]
pub const SIX_CORR: [f64; 1001] = [
    1.0, 1.0003125455763075, 1.0006251823187933, 1.0009379102478022,
    1.001250729383679, 1.001563639746768, 1.0018766413574138, 1.0021897342359604,
    1.0025029184027519, 1.0028161938781322, 1.0031295606824449, 1.0034430188360335,
    1.0037565683592414, 1.0040702092724117, 1.0043839415958872, 1.0046977653500108,
    1.0050116805551249, 1.005325687231572, 1.0056397853996941, 1.0059539750798331,
    1.0062682562923308, 1.0065826290575286, 1.0068970933957678, 1.0072116493273894,
    1.0075262968727343, 1.0078410360521429, 1.0081558668859556, 1.0084707893945125,
    1.0087858035981535, 1.009100909517218, 1.0094161071720455, 1.0097313965829751,
    1.0100467777703455, 1.0103622507544952, 1.0106778155557626, 1.0109934721944857,
    1.0113092206910021, 1.0116250610656494, 1.0119409933387647, 1.0122570175306848,
    1.0125731336617463, 1.0128893417522855, 1.0132056418226384, 1.0135220338931406,
    1.0138385179841274, 1.0141550941159341, 1.0144717623088951, 1.0147885225833451,
    1.0151053749596179, 1.0154223194580475, 1.0157393560989672, 1.01605648490271,
    1.0163737058896088, 1.0166910190799958, 1.0170084244942033, 1.0173259221525627,
    1.0176435120754056, 1.0179611942830627, 1.0182789687958648, 1.0185968356341421,
    1.0189147948182245, 1.0192328463684413, 1.0195509903051218, 1.0198692266485946,
    1.0201875554191881, 1.0205059766372302, 1.0208244903230484, 1.0211430964969699,
    1.0214617951793214, 1.0217805863904293, 1.0220994701506193, 1.0224184464802171,
    1.0227375153995476, 1.0230566769289356, 1.0233759310887052, 1.0236952778991802,
    1.0240147173806839, 1.0243342495535393, 1.0246538744380688, 1.0249735920545944,
    1.0252934024234376, 1.0256133055649196, 1.0259333014993609, 1.0262533902470818,
    1.0265735718284018, 1.0268938462636403, 1.0272142135731159, 1.027534673777147,
    1.0278552268960512, 1.0281758729501459, 1.0284966119597479, 1.0288174439451733,
    1.0291383689267381, 1.0294593869247575, 1.0297804979595462, 1.0301017020514185,
    1.0304229992206881, 1.0307443894876682, 1.0310658728726715, 1.0313874493960102,
    1.0317091190779959, 1.0320308819389395, 1.0323527379991517, 1.0326746872789425,
    1.0329967297986211, 1.0333188655784967, 1.0336410946388773, 1.0339634170000708,
    1.0342858326823844, 1.0346083417061246, 1.0349309440915975, 1.0352536398591085,
    1.0355764290289625, 1.0358993116214637, 1.0362222876569159, 1.0365453571556221,
    1.0368685201378848, 1.0371917766240058, 1.0375151266342864, 1.0378385701890273,
    1.0381621073085285, 1.0384857380130894, 1.0388094623230087, 1.0391332802585847,
    1.0394571918401148, 1.0397811970878959, 1.0401052960222243, 1.0404294886633954,
    1.0407537750317044, 1.0410781551474453, 1.0414026290309119, 1.0417271967023971,
    1.0420518581821932, 1.0423766134905917, 1.0427014626478837, 1.0430264056743593,
    1.0433514425903082, 1.0436765734160191, 1.0440017981717804, 1.0443271168778794,
    1.044652529554603, 1.0449780362222372, 1.0453036369010675, 1.0456293316113783,
    1.0459551203734538, 1.0462810032075771, 1.0466069801340306, 1.0469330511730961,
    1.0472592163450547, 1.0475854756701866, 1.0479118291687714, 1.0482382768610878,
    1.0485648187674138, 1.0488914549080267, 1.0492181853032031, 1.0495450099732187,
    1.0498719289383484, 1.0501989422188664, 1.0505260498350462, 1.0508532518071605,
    1.051180548155481, 1.0515079389002788, 1.0518354240618242, 1.0521630036603867,
    1.0524906777162349, 1.0528184462496367, 1.0531463092808591, 1.0534742668301683,
    1.0538023189178298, 1.0541304655641081, 1.054458706789267, 1.0547870426135694,
    1.0551154730572774, 1.0554439981406521, 1.0557726178839541, 1.0561013323074428,
    1.0564301414313769, 1.0567590452760142, 1.0570880438616117, 1.0574171372084256,
    1.0577463253367109, 1.058075608266722, 1.0584049860187125, 1.0587344586129348,
    1.0590640260696407, 1.059393688409081, 1.0597234456515055, 1.0600532978171632,
    1.0603832449263022, 1.0607132869991697, 1.061043424056012, 1.0613736561170743,
    1.0617039832026011, 1.0620344053328358, 1.0623649225280211, 1.0626955348083985,
    1.0630262421942087, 1.0633570447056914, 1.0636879423630853, 1.0640189351866284,
    1.0643500231965574, 1.0646812064131083, 1.0650124848565159, 1.0653438585470143,
    1.0656753275048364, 1.0660068917502141, 1.0663385513033786, 1.0666703061845598,
    1.0670021564139867, 1.0673341020118875, 1.067666142998489, 1.0679982793940173,
    1.0683305112186975, 1.0686628384927535, 1.0689952612364082, 1.0693277794698837,
    1.0696603932134008, 1.0699931024871794, 1.0703259073114383, 1.0706588077063954,
    1.0709918036922674, 1.07132489528927, 1.0716580825176178, 1.0719913653975245,
    1.0723247439492025, 1.0726582181928633, 1.0729917881487172, 1.0733254538369737,
    1.0736592152778407, 1.0739930724915256, 1.0743270254982344, 1.0746610743181719,
    1.074995218971542, 1.0753294594785475, 1.07566379585939, 1.07599822813427,
    1.0763327563233868, 1.0766673804469388, 1.0770021005251232, 1.0773369165781358,
    1.0776718286261717, 1.0780068366894244, 1.0783419407880867, 1.07867714094235,
    1.0790124371724046, 1.0793478294984395, 1.0796833179406428, 1.0800189025192012,
    1.0803545832543005, 1.0806903601661249, 1.0810262332748579, 1.0813622026006815,
    1.0816982681637766, 1.0820344299843229, 1.082370688082499, 1.082707042478482,
    1.0830434931924481, 1.0833800402445722, 1.0837166836550279, 1.0840534234439878,
    1.0843902596316229, 1.0847271922381034, 1.0850642212835979, 1.085401346788274,
    1.0857385687722979, 1.0860758872558346, 1.086413302259048, 1.0867508138021005,
    1.0870884219051534, 1.0874261265883667, 1.087763927871899, 1.0881018257759079,
    1.0884398203205494, 1.0887779115259784, 1.0891160994123486, 1.0894543839998122,
    1.0897927653085201, 1.0901312433586222, 1.0904698181702667, 1.0908084897636008,
    1.0911472581587701, 1.0914861233759191, 1.091825085435191, 1.0921641443567274,
    1.0925033001606689, 1.0928425528671545, 1.0931819024963219, 1.0935213490683077,
    1.0938608926032467, 1.0942005331212728, 1.0945402706425183, 1.0948801051871141,
    1.0952200367751898, 1.0955600654268737, 1.0959001911622925, 1.0962404140015718,
    1.0965807339648355, 1.0969211510722064, 1.0972616653438058, 1.0976022767997534,
    1.0979429854601677, 1.0982837913451659, 1.0986246944748634, 1.0989656948693746,
    1.0993067925488121, 1.0996479875332874, 1.0999892798429103, 1.1003306694977892,
    1.1006721565180314, 1.1010137409237422, 1.1013554227350258, 1.1016972019719848,
    1.1020390786547205, 1.1023810528033326, 1.1027231244379194, 1.1030652935785775,
    1.1034075602454023, 1.1037499244584876, 1.1040923862379256, 1.1044349456038073,
    1.1047776025762219, 1.1051203571752573, 1.1054632094209996, 1.1058061593335337,
    1.1061492069329429, 1.1064923522393089, 1.1068355952727119, 1.1071789360532305,
    1.107522374600942, 1.1078659109359218, 1.108209545078244, 1.1085532770479812,
    1.1088971068652042, 1.1092410345499823, 1.1095850601223835, 1.1099291836024739,
    1.1102734050103182, 1.1106177243659795, 1.1109621416895192, 1.1113066570009972,
    1.1116512703204718, 1.1119959816679998, 1.1123407910636361, 1.1126856985274344,
    1.1130307040794465, 1.1133758077397225, 1.1137210095283112, 1.1140663094652596,
    1.114411707570613, 1.1147572038644151, 1.115102798366708, 1.1154484910975322,
    1.1157942820769264, 1.1161401713249278, 1.1164861588615718, 1.1168322447068923,
    1.1171784288809213, 1.1175247114036894, 1.1178710922952252, 1.1182175715755559,
    1.1185641492647069, 1.1189108253827018, 1.1192575999495627, 1.1196044729853099,
    1.1199514445099619, 1.1202985145435356, 1.1206456831060462, 1.1209929502175072,
    1.1213403158979301, 1.121687780167325, 1.1220353430457001, 1.1223830045530619,
    1.1227307647094151, 1.1230786235347628, 1.123426581049106, 1.1237746372724444,
    1.1241227922247756, 1.1244710459260955, 1.1248193983963983, 1.1251678496556764,
    1.1255163997239203, 1.1258650486211188, 1.126213796367259, 1.126562642982326,
    1.1269115884863031, 1.1272606328991721, 1.1276097762409126, 1.1279590185315027,
    1.1283083597909183, 1.1286578000391338, 1.1290073392961217, 1.1293569775818526,
    1.1297067149162952, 1.1300565513194164, 1.1304064868111814, 1.1307565214115534,
    1.1311066551404936, 1.1314568880179615, 1.1318072200639148, 1.1321576512983092,
    1.1325081817410986, 1.1328588114122347, 1.1332095403316679, 1.1335603685193461,
    1.1339112959952156, 1.1342623227792209, 1.1346134488913043, 1.1349646743514063,
    1.1353159991794656, 1.1356674233954188, 1.1360189470192007, 1.136370570070744,
    1.1367222925699797, 1.1370741145368366, 1.1374260359912417, 1.13777805695312,
    1.1381301774423945, 1.1384823974789863, 1.1388347170828146, 1.1391871362737964,
    1.1395396550718469, 1.1398922734968792, 1.1402449915688046, 1.1405978093075321,
    1.140950726732969, 1.1413037438650205, 1.1416568607235896, 1.1420100773285775,
    1.1423633936998834, 1.1427168098574043, 1.1430703258210353, 1.1434239416106694,
    1.1437776572461976, 1.1441314727475088, 1.14448538813449, 1.1448394034270259,
    1.1451935186449994, 1.1455477338082911, 1.1459020489367796, 1.1462564640503416,
    1.1466109791688516, 1.1469655943121818, 1.1473203095002026, 1.1476751247527823,
    1.1480300400897869, 1.1483850555310805, 1.1487401710965249, 1.1490953868059798,
    1.1494507026793031, 1.1498061187363502, 1.1501616349969744, 1.1505172514810272,
    1.1508729682083575, 1.1512287851988124, 1.1515847024722368, 1.1519407200484732,
    1.1522968379473622, 1.1526530561887421, 1.1530093747924492, 1.1533657937783175,
    1.1537223131661786, 1.1540789329758624, 1.1544356532271963, 1.1547924739400054,
    1.1551493951341128, 1.1555064168293395, 1.155863539045504, 1.1562207618024227,
    1.1565780851199099, 1.1569355090177775, 1.1572930335158353, 1.1576506586338907,
    1.1580083843917491, 1.1583662108092134, 1.1587241379060845, 1.1590821657021607,
    1.1594402942172385, 1.1597985234711117, 1.1601568534835721, 1.1605152842744091,
    1.1608738158634099, 1.1612324482703593, 1.1615911815150399, 1.161950015617232,
    1.1623089505967136, 1.1626679864732603, 1.1630271232666456, 1.1633863609966403,
    1.1637456996830134, 1.164105139345531, 1.1644646800039574, 1.1648243216780543,
    1.1651840643875809, 1.1655439081522944, 1.1659038529919494, 1.1662638989262982,
    1.1666240459750909, 1.1669842941580749, 1.1673446434949956, 1.1677050940055957,
    1.1680656457096156, 1.1684262986267936, 1.1687870527768651, 1.1691479081795636,
    1.1695088648546199, 1.1698699228217623, 1.1702310821007171, 1.1705923427112077,
    1.1709537046729554, 1.171315168005679, 1.1716767327290948, 1.1720383988629167,
    1.1724001664268562, 1.1727620354406221, 1.1731240059239212, 1.1734860778964574,
    1.1738482513779324, 1.1742105263880453, 1.1745729029464929, 1.1749353810729692,
    1.175297960787166, 1.1756606421087724, 1.1760234250574753, 1.1763863096529588,
    1.1767492959149046, 1.1771123838629918, 1.1774755735168973, 1.177838864896295,
    1.1782022580208567, 1.1785657529102514, 1.1789293495841457, 1.1792930480622036,
    1.1796568483640864, 1.1800207505094532, 1.1803847545179603, 1.1807488604092613,
    1.1811130682030077, 1.1814773779188479, 1.181841789576428, 1.1822063031953915,
    1.1825709187953793, 1.1829356363960296, 1.1833004560169782, 1.183665377677858,
    1.1840304013982995, 1.1843955271979307, 1.1847607550963766, 1.1851260851132599,
    1.1854915172682006, 1.185857051580816, 1.1862226880707207, 1.1865884267575268,
    1.1869542676608436, 1.1873202108002779, 1.1876862561954337, 1.1880524038659124,
    1.1884186538313127, 1.1887850061112306, 1.1891514607252595, 1.1895180176929901,
    1.1898846770340102, 1.1902514387679051, 1.1906183029142574, 1.1909852694926469,
    1.1913523385226508, 1.1917195100238434, 1.1920867840157963, 1.1924541605180786,
    1.1928216395502564, 1.1931892211318932, 1.1935569052825497, 1.1939246920217838,
    1.1942925813691507, 1.1946605733442029, 1.19502866796649, 1.1953968652555588,
    1.1957651652309535, 1.1961335679122155, 1.1965020733188831, 1.1968706814704922,
    1.1972393923865756, 1.1976082060866635, 1.1979771225902832, 1.1983461419169591,
    1.198715264086213, 1.1990844891175636, 1.199453817030527, 1.1998232478446163,
    1.2001927815793418, 1.200562418254211, 1.2009321578887286, 1.2013020005023961,
    1.2016719461147126, 1.202041994745174, 1.2024121464132735, 1.2027824011385014,
    1.2031527589403449, 1.2035232198382885, 1.2038937838518139, 1.2042644510003997,
    1.2046352213035216, 1.2050060947806525, 1.2053770714512623, 1.2057481513348181,
    1.2061193344507838, 1.2064906208186207, 1.2068620104577868, 1.2072335033877375,
    1.2076050996279251, 1.2079767991977988, 1.208348602116805, 1.2087205084043873,
    1.2090925180799858, 1.2094646311630382, 1.2098368476729789, 1.2102091676292394,
    1.210581591051248, 1.2109541179584304, 1.211326748370209, 1.2116994823060032,
    1.2120723197852295, 1.2124452608273013, 1.212818305451629, 1.21319145367762,
    1.2135647055246785, 1.2139380610122058, 1.2143115201596003, 1.2146850829862569,
    1.2150587495115679, 1.2154325197549223, 1.215806393735706, 1.216180371473302,
    1.21655445298709, 1.2169286382964468, 1.217302927420746, 1.2176773203793582,
    1.2180518171916507, 1.2184264178769878, 1.2188011224547309, 1.2191759309442379,
    1.2195508433648638, 1.2199258597359604, 1.2203009800768764, 1.2206762044069574,
    1.2210515327455457, 1.2214269651119806, 1.2218025015255982, 1.2221781420057313,
    1.2225538865717097, 1.22292973524286, 1.2233056880385056, 1.2236817449779667,
    1.2240579060805602, 1.2244341713656, 1.2248105408523967, 1.2251870145602577,
    1.2255635925084872, 1.2259402747163861, 1.2263170612032523, 1.22669395198838,
    1.2270709470910608, 1.2274480465305825, 1.22782525032623, 1.2282025584972848,
    1.2285799710630252, 1.2289574880427261, 1.2293351094556594, 1.2297128353210934,
    1.2300906656582934, 1.2304686004865212, 1.2308466398250354, 1.2312247836930915,
    1.2316030321099412, 1.2319813850948335, 1.2323598426670135, 1.2327384048457235,
    1.2331170716502021, 1.2334958430996847, 1.2338747192134034, 1.2342537000105869,
    1.2346327855104606, 1.2350119757322466, 1.2353912706951634, 1.2357706704184265,
    1.2361501749212476, 1.2365297842228355, 1.2369094983423952, 1.2372893172991286,
    1.2376692411122341, 1.2380492698009066, 1.2384294033843377, 1.2388096418817157,
    1.2391899853122253, 1.2395704336950479, 1.2399509870493613, 1.2403316453943402,
    1.2407124087491555, 1.2410932771329748, 1.2414742505649624, 1.241855329064279,
    1.2422365126500818, 1.2426178013415245, 1.2429991951577576, 1.2433806941179278,
    1.2437622982411785, 1.2441440075466497, 1.2445258220534776, 1.2449077417807951,
    1.2452897667477317, 1.2456718969734132, 1.2460541324769619, 1.2464364732774967,
    1.2468189193941329, 1.2472014708459823, 1.247584127652153, 1.2479668898317498,
    1.2483497574038738, 1.2487327303876226, 1.2491158088020902, 1.249498992666367,
    1.24988228199954, 1.2502656768206925, 1.2506491771489041, 1.251032783003251,
    1.2514164944028057, 1.2518003113666372, 1.2521842339138108, 1.2525682620633882,
    1.2529523958344275, 1.2533366352459832, 1.2537209803171062, 1.2541054310668435,
    1.2544899875142389, 1.2548746496783322, 1.2552594175781597, 1.255644291232754,
    1.2560292706611441, 1.2564143558823552, 1.2567995469154089, 1.2571848437793233,
    1.2575702464931124, 1.2579557550757869, 1.2583413695463536, 1.2587270899238157,
    1.2591129162271725, 1.2594988484754199, 1.2598848866875498, 1.2602710308825504,
    1.2606572810794064, 1.2610436372970985, 1.2614300995546038, 1.2618166678708956,
    1.2622033422649434, 1.2625901227557131, 1.2629770093621667, 1.2633640021032624,
    1.2637511009979547, 1.2641383060651943, 1.2645256173239281, 1.2649130347930993,
    1.265300558491647, 1.2656881884385069, 1.2660759246526106, 1.2664637671528859,
    1.266851715958257, 1.267239771087644, 1.2676279325599634, 1.2680162003941275,
    1.2684045746090453, 1.2687930552236214, 1.2691816422567568, 1.2695703357273487,
    1.2699591356542904, 1.270348042056471, 1.2707370549527763, 1.2711261743620877,
    1.2715154003032829, 1.2719047327952359, 1.2722941718568163, 1.2726837175068903,
    1.2730733697643199, 1.2734631286479632, 1.2738529941766745, 1.2742429663693041,
    1.2746330452446982, 1.2750232308216993, 1.2754135231191459, 1.2758039221558723,
    1.2761944279507092, 1.2765850405224831, 1.2769757598900166, 1.2773665860721282,
    1.2777575190876325, 1.2781485589553403, 1.2785397056940581, 1.2789309593225885,
    1.2793223198597301, 1.2797137873242775, 1.2801053617350212, 1.2804970431107479,
    1.28088883147024, 1.281280726832276, 1.2816727292156303, 1.2820648386390732,
    1.2824570551213711, 1.2828493786812862, 1.2832418093375766, 1.2836343471089966,
    1.2840269920142961, 1.284419744072221, 1.2848126033015133, 1.2852055697209105,
    1.2855986433491464, 1.2859918242049506, 1.2863851123070483, 1.286778507674161,
    1.2871720103250057, 1.2875656202782955, 1.2879593375527393, 1.2883531621670418,
    1.2887470941399037, 1.2891411334900213, 1.2895352802360869, 1.2899295343967887,
    1.2903238959908105, 1.2907183650368322, 1.2911129415535292, 1.2915076255595729,
    1.2919024170736306, 1.2922973161143651, 1.2926923227004353, 1.2930874368504955,
    1.2934826585831963, 1.2938779879171836, 1.2942734248710994, 1.2946689694635811,
    1.2950646217132622, 1.2954603816387718, 1.2958562492587348, 1.2962522245917717,
    1.2966483076564988, 1.2970444984715282, 1.2974407970554677, 1.2978372034269207,
    1.2982337176044865, 1.2986303396067598, 1.2990270694523313, 1.2994239071597872,
    1.2998208527477095, 1.3002179062346758, 1.3006150676392593, 1.3010123369800291,
    1.3014097142755498, 1.3018071995443816, 1.3022047928050804, 1.3026024940761977,
    1.3030003033762809, 1.3033982207238726, 1.3037962461375113, 1.3041943796357312,
    1.3045926212370617, 1.3049909709600283, 1.3053894288231517, 1.3057879948449485,
    1.3061866690439306, 1.3065854514386058, 1.3069843420474772, 1.3073833408890435,
    1.3077824479817992, 1.308181663344234, 1.3085809869948335, 1.3089804189520786,
    1.3093799592344459, 1.3097796078604073, 1.3101793648484305, 1.3105792302169786,
    1.3109792039845102, 1.3113792861694793, 1.3117794767903357, 1.3121797758655245,
    1.3125801834134862, 1.3129806994526569, 1.3133813240014683, 1.3137820570783473,
    1.3141828987017166, 1.3145838488899939, 1.3149849076615929, 1.3153860750349222,
    1.3157873510283864, 1.316188735660385, 1.3165902289493133, 1.3169918309135619,
    1.3173935415715167, 1.3177953609415593, 1.3181972890420665, 1.3185993258914104,
    1.3190014715079587, 1.3194037259100745, 1.3198060891161161, 1.3202085611444373,
    1.3206111420133872, 1.3210138317413104, 1.3214166303465466, 1.3218195378474311,
    1.3222225542622945, 1.3226256796094626, 1.3230289139072566, 1.3234322571739931,
    1.3238357094279841, 1.3242392706875365, 1.324642940970953, 1.3250467202965314,
    1.3254506086825646, 1.3258546061473412, 1.3262587127091447, 1.326662928386254,
    1.3270672531969435, 1.3274716871594825, 1.3278762302921359, 1.3282808826131635,
    1.3286856441408206, 1.3290905148933577, 1.3294954948890204, 1.3299005841460498,
    1.330305782682682, 1.3307110905171483, 1.3311165076676753, 1.3315220341524848,
    1.3319276699897938, 1.3323334151978144, 1.3327392697947541, 1.3331452337988153,
    1.3335513072281957, 1.3339574901010883, 1.334363782435681, 1.3347701842501571,
    1.3351766955626949, 1.3355833163914679, 1.3359900467546446, 1.3363968866703889,
    1.3368038361568596, 1.3372108952322107, 1.3376180639145912, 1.3380253422221455,
    1.3384327301730127, 1.3388402277853273, 1.3392478350772188, 1.3396555520668117,
    1.3400633787722257, 1.3404713152115754, 1.3408793614029706, 1.3412875173645161,
    1.3416957831143119, 1.3421041586704528, 1.3425126440510287, 1.3429212392741247,
    1.3433299443578207, 1.3437387593201918, 1.344147684179308, 1.3445567189532343,
    1.3449658636600307, 1.3453751183177524, 1.3457844829444493, 1.3461939575581664,
    1.3466035421769437, 1.3470132368188162, 1.3474230415018136, 1.347832956243961,
    1.3482429810632781, 1.3486531159777796, 1.3490633610054753, 1.3494737161643697,
    1.3498841814724625, 1.3502947569477481, 1.3507054426082158, 1.3511162384718499,
    1.3515271445566297, 1.3519381608805291, 1.3523492874615172, 1.3527605243175579,
    1.3531718714666097, 1.3535833289266264, 1.3539948967155563, 1.3544065748513428,
    1.354818363351924, 1.3552302622352329, 1.3556422715191973, 1.3560543912371811,
    1.356466675879548, 1.3568792551424521, 1.3572922059166952, 1.3577055848910001,
    1.3581194388271188, 1.3585338081287232, 1.358948728638186, 1.3593642327007595,
    1.3597803498595097, 1.360197107340214, 1.3606145304064326, 1.3610326426292671,
    1.3614514660983561,
];

/// Correction factor for a six-dimensional nearest-neighbor volume, linearly interpolated
/// in [`SIX_CORR`]. `nns` is clamped to the tabulated range.
pub fn six_volume_correction(nns: f64) -> f64 {
    let last = (SIX_CORR.len() - 1) as f64;
    let x = (nns / SIX_CORR_SPACING).clamp(0.0, last);
    let index = (x.floor() as usize).min(SIX_CORR.len() - 2);
    let dx = x - index as f64;
    (1.0 - dx) * SIX_CORR[index] + dx * SIX_CORR[index + 1]
}
